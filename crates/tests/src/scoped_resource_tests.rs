use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_ui::scoped::{
    DocumentResource, OutsideClickScope, ResourceGuard, ResourceHost, ResourceId,
};
use shared_ui::selection::{CloseReason, One, SelectionMachine};

type Callbacks = Rc<RefCell<HashMap<ResourceId, (DocumentResource, Box<dyn FnMut()>)>>>;

/// Stands in for the browser document: remembers live resources and lets the
/// test fire them.
#[derive(Clone, Default)]
struct FakeDocument {
    live: Callbacks,
}

impl FakeDocument {
    fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    fn scroll_locked(&self) -> bool {
        self.live
            .borrow()
            .values()
            .any(|(resource, _)| *resource == DocumentResource::ScrollLock)
    }

    /// Deliver a click outside every boundary except `inside`.
    fn click_outside(&self, inside: Option<&str>) {
        let mut live = self.live.borrow_mut();
        for (resource, callback) in live.values_mut() {
            if let DocumentResource::OutsideClick { boundary_id, .. } = resource {
                if Some(boundary_id.as_str()) != inside {
                    callback();
                }
            }
        }
    }

    fn press_escape(&self) {
        let mut live = self.live.borrow_mut();
        for (resource, callback) in live.values_mut() {
            if *resource == DocumentResource::EscapeKey {
                callback();
            }
        }
    }
}

impl ResourceHost for FakeDocument {
    fn acquire(&self, id: ResourceId, resource: &DocumentResource, on_fire: Box<dyn FnMut()>) {
        self.live.borrow_mut().insert(id, (resource.clone(), on_fire));
    }

    fn release(&self, id: ResourceId, _resource: &DocumentResource) {
        self.live.borrow_mut().remove(&id);
    }
}

type Machine = Rc<RefCell<SelectionMachine<String, One>>>;

fn open_dropdown(
    doc: &FakeDocument,
    boundary_id: &str,
    scope: OutsideClickScope,
) -> (Machine, ResourceGuard<FakeDocument>) {
    let machine: Machine = Rc::default();
    machine.borrow_mut().open();
    let target = machine.clone();
    let guard = ResourceGuard::acquire(
        doc.clone(),
        DocumentResource::OutsideClick {
            boundary_id: boundary_id.to_string(),
            scope,
        },
        move || {
            target.borrow_mut().close(CloseReason::OutsideClick);
        },
    );
    (machine, guard)
}

#[test]
fn clicking_inside_one_dropdown_closes_the_other() {
    let doc = FakeDocument::default();
    let (court, _court_guard) = open_dropdown(&doc, "court", OutsideClickScope::Shared);
    let (sort, _sort_guard) = open_dropdown(&doc, "sort", OutsideClickScope::PerInstance);
    assert_eq!(doc.live_count(), 2);

    doc.click_outside(Some("court"));

    assert!(court.borrow().is_open());
    assert!(!sort.borrow().is_open());
}

#[test]
fn closing_each_dropdown_releases_its_listener() {
    let doc = FakeDocument::default();
    let (_, court_guard) = open_dropdown(&doc, "court", OutsideClickScope::Shared);
    let (_, year_guard) = open_dropdown(&doc, "year", OutsideClickScope::Shared);

    let mut slots = vec![Some(court_guard), Some(year_guard)];
    slots[0] = None;
    assert_eq!(doc.live_count(), 1);
    slots.clear();
    assert_eq!(doc.live_count(), 0);
}

#[test]
fn modal_locks_scroll_and_closes_on_escape() {
    let doc = FakeDocument::default();
    let closed = Rc::new(RefCell::new(false));

    let mut modal = Some({
        let closed = closed.clone();
        (
            ResourceGuard::acquire(doc.clone(), DocumentResource::ScrollLock, || {}),
            ResourceGuard::acquire(doc.clone(), DocumentResource::EscapeKey, move || {
                *closed.borrow_mut() = true;
            }),
        )
    });
    assert!(doc.scroll_locked());

    doc.press_escape();
    assert!(*closed.borrow());

    drop(modal.take());
    assert!(!doc.scroll_locked());
    assert_eq!(doc.live_count(), 0);
}
