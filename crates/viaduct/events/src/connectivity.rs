//! Connectivity-monitoring patch.

use crate::intercept::InterceptEngine;
use crate::target::{EventTarget, MethodArgs, TargetClass};
use crate::zone::ZoneRuntime;
use std::rc::Rc;

pub const START_MONITORING: &str = "startMonitoring";

/// Wrap callbacks handed to the connectivity monitor so they run inside the
/// zone's execution context.
///
/// Plain callback wrapping: no task ledger is involved and monitoring
/// callbacks are not cancellable through this layer.
pub fn patch_connectivity(class: &Rc<TargetClass>, zone: &Rc<dyn ZoneRuntime>) {
    let _ = InterceptEngine::patch_method(class, START_MONITORING, |original| {
        let zone = Rc::clone(zone);
        Rc::new(move |target: &Rc<EventTarget>, mut args: MethodArgs| {
            args.handler = zone.wrap("connectivity:startMonitoring", args.handler.clone());
            original(target, args);
        })
    });
}
