//! DOM-bound managers, one per page feature.
//!
//! ARCHITECTURE
//! ============
//! Each manager is mounted once at boot and lives for the page lifetime. It
//! owns its elements and an `Rc<RefCell<_>>` of its state from `crate::state`;
//! listener closures hold clones of the manager. Managers never reference each
//! other; `app` wires the one cross-cutting rule (close the menu on resize).

pub mod animation;
pub mod contact;
pub mod navigation;
pub mod skills;
pub mod theme;
