//! Document-level resources held only while a panel or modal is open.
//!
//! A [`ResourceGuard`] acquires its resource on construction and releases it
//! on drop, so closing, unmounting and navigating away all release through
//! the same path. Components use [`use_scoped_resource`] for resources tied
//! to an open flag and [`use_mounted_resource`] for ones tied to mounting.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Who owns the document listener behind an outside-click watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutsideClickScope {
    /// One document listener dispatches to every open dropdown on the page.
    #[default]
    Shared,
    /// The dropdown installs and removes its own listener.
    PerInstance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentResource {
    /// Fires when a pointer press lands outside the element with `boundary_id`.
    OutsideClick {
        boundary_id: String,
        scope: OutsideClickScope,
    },
    /// Fires when Escape is pressed anywhere in the document.
    EscapeKey,
    /// Hides body overflow; restores the previous value on release. Never fires.
    ScrollLock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(u64);

impl ResourceId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ResourceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Something that can attach document resources.
pub trait ResourceHost: Clone + 'static {
    fn acquire(&self, id: ResourceId, resource: &DocumentResource, on_fire: Box<dyn FnMut()>);
    fn release(&self, id: ResourceId, resource: &DocumentResource);
}

/// Holds one acquired resource; releases it when dropped.
pub struct ResourceGuard<H: ResourceHost> {
    host: H,
    id: ResourceId,
    resource: DocumentResource,
}

impl<H: ResourceHost> ResourceGuard<H> {
    pub fn acquire(host: H, resource: DocumentResource, on_fire: impl FnMut() + 'static) -> Self {
        let id = ResourceId::next();
        tracing::debug!(id = id.as_u64(), ?resource, "acquiring document resource");
        host.acquire(id, &resource, Box::new(on_fire));
        Self { host, id, resource }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn resource(&self) -> &DocumentResource {
        &self.resource
    }
}

impl<H: ResourceHost> Drop for ResourceGuard<H> {
    fn drop(&mut self) {
        tracing::debug!(id = self.id.as_u64(), "releasing document resource");
        self.host.release(self.id, &self.resource);
    }
}

/// Browser host built on `document::eval`.
///
/// Each resource registers an undo function under its id in
/// `window.__cfScoped`; release calls it. Fired events travel back over the
/// eval channel and are forwarded to `on_fire` from a scope-owned task.
#[derive(Clone, Default)]
pub struct DomHost {
    tasks: Rc<RefCell<HashMap<ResourceId, Task>>>,
}

impl PartialEq for DomHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl ResourceHost for DomHost {
    fn acquire(&self, id: ResourceId, resource: &DocumentResource, mut on_fire: Box<dyn FnMut()>) {
        let mut eval = document::eval(&install_script(id, resource));
        if matches!(resource, DocumentResource::ScrollLock) {
            return;
        }
        let task = spawn(async move {
            while eval.recv::<bool>().await.is_ok() {
                on_fire();
            }
        });
        self.tasks.borrow_mut().insert(id, task);
    }

    fn release(&self, id: ResourceId, _resource: &DocumentResource) {
        if let Some(task) = self.tasks.borrow_mut().remove(&id) {
            task.cancel();
        }
        document::eval(&release_script(id));
    }
}

/// Bring `slot` in line with `active`: acquire when active and empty,
/// release when inactive, and swap the guard when `resource` differs from
/// the held one. Returns `true` if the slot changed.
pub fn reconcile<H: ResourceHost>(
    slot: &mut Option<ResourceGuard<H>>,
    host: &H,
    active: bool,
    resource: &DocumentResource,
    on_fire: impl FnMut() + 'static,
) -> bool {
    let held = slot.as_ref().map(|guard| guard.resource() == resource);
    match (active, held) {
        (true, Some(true)) | (false, None) => false,
        (true, _) => {
            *slot = Some(ResourceGuard::acquire(host.clone(), resource.clone(), on_fire));
            true
        }
        (false, Some(_)) => {
            *slot = None;
            true
        }
    }
}

/// Hold `resource` while `active` is true. A changed `resource` (e.g. a new
/// outside-click scope) is re-acquired on the next render; the guard is also
/// released when the component unmounts.
pub fn use_scoped_resource<F>(active: Memo<bool>, resource: DocumentResource, on_fire: F)
where
    F: FnMut() + Clone + 'static,
{
    let host = use_hook(DomHost::default);
    let slot = use_hook(|| Rc::new(RefCell::new(None::<ResourceGuard<DomHost>>)));

    use_effect(use_reactive!(|resource| {
        reconcile(
            &mut slot.borrow_mut(),
            &host,
            active(),
            &resource,
            on_fire.clone(),
        );
    }));
}

/// Hold `resource` for the component's whole lifetime.
pub fn use_mounted_resource<F>(resource: DocumentResource, on_fire: F)
where
    F: FnMut() + 'static,
{
    use_hook(move || Rc::new(ResourceGuard::acquire(DomHost::default(), resource, on_fire)));
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// JS that installs `resource` and registers its undo function.
pub fn install_script(id: ResourceId, resource: &DocumentResource) -> String {
    let key = id.as_u64();
    let body = match resource {
        DocumentResource::OutsideClick {
            boundary_id,
            scope: OutsideClickScope::PerInstance,
        } => format!(
            r#"const handler = (e) => {{
                const b = document.getElementById({boundary});
                if (b && !b.contains(e.target)) {{ dioxus.send(true); }}
            }};
            document.addEventListener("mousedown", handler, true);
            reg[{key}] = () => document.removeEventListener("mousedown", handler, true);"#,
            boundary = js_string(boundary_id),
        ),
        DocumentResource::OutsideClick {
            boundary_id,
            scope: OutsideClickScope::Shared,
        } => format!(
            r#"const shared = (window.__cfOutside = window.__cfOutside || {{ entries: {{}}, handler: null }});
            shared.entries[{key}] = {{ boundary: {boundary}, fire: () => dioxus.send(true) }};
            if (!shared.handler) {{
                shared.handler = (e) => {{
                    for (const k in shared.entries) {{
                        const entry = shared.entries[k];
                        const b = document.getElementById(entry.boundary);
                        if (b && !b.contains(e.target)) {{ entry.fire(); }}
                    }}
                }};
                document.addEventListener("mousedown", shared.handler, true);
            }}
            reg[{key}] = () => {{
                delete shared.entries[{key}];
                if (Object.keys(shared.entries).length === 0 && shared.handler) {{
                    document.removeEventListener("mousedown", shared.handler, true);
                    shared.handler = null;
                }}
            }};"#,
            boundary = js_string(boundary_id),
        ),
        DocumentResource::EscapeKey => format!(
            r#"const handler = (e) => {{ if (e.key === "Escape") {{ dioxus.send(true); }} }};
            document.addEventListener("keydown", handler);
            reg[{key}] = () => document.removeEventListener("keydown", handler);"#
        ),
        DocumentResource::ScrollLock => format!(
            r#"const previous = document.body.style.overflow;
            document.body.style.overflow = "hidden";
            reg[{key}] = () => {{ document.body.style.overflow = previous; }};"#
        ),
    };
    format!("const reg = (window.__cfScoped = window.__cfScoped || {{}});\n{body}")
}

/// JS that runs and forgets the undo function registered for `id`.
pub fn release_script(id: ResourceId) -> String {
    let key = id.as_u64();
    format!(
        r#"const reg = window.__cfScoped || {{}};
        const undo = reg[{key}];
        if (undo) {{ undo(); delete reg[{key}]; }}"#
    )
}
