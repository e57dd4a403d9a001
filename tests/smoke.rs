//! The facade exposes everything a host needs for the common dialog flow.

use focuslock::{Direction, DomPort, FocusLockEngine, LockConfig, ReturnFocus};
use sim_dom::SimDom;

#[test]
fn dialog_flow_through_the_facade() {
    let mut dom = SimDom::new();
    let body = dom.body();
    let opener = dom.el(body, "button", &[]);
    let dialog = dom.el(body, "div", &[]);
    let name = dom.el(dialog, "input", &[]);
    let submit = dom.el(dialog, "button", &[]);
    dom.force_active(Some(opener));

    let mut engine = FocusLockEngine::new();
    let lock = engine.activate(
        &mut dom,
        dialog,
        LockConfig {
            return_focus: ReturnFocus::Enabled,
            ..Default::default()
        },
    );
    assert_eq!(dom.active_element(), Some(name));

    assert!(engine.handle_tab(&mut dom, Direction::Forward));
    assert_eq!(dom.active_element(), Some(submit));
    assert!(engine.handle_tab(&mut dom, Direction::Forward));
    assert_eq!(dom.active_element(), Some(name));

    engine.deactivate(&mut dom, lock);
    assert_eq!(dom.active_element(), Some(opener));
}
