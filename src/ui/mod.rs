//! Page interaction state
//!
//! Each component is a plain state machine owned by one instance. Nothing here
//! touches the DOM; `platform` reads the resulting views and timers are driven
//! by the caller through `now_ms` arguments.

pub mod accordion;
pub mod copy_feedback;
pub mod menu;
pub mod modal;
pub mod nav;
pub mod navbar;
pub mod reveal;

pub use accordion::{Accordion, AccordionChange, Ripple};
pub use copy_feedback::LabelPhase;
pub use menu::{MenuState, MenuView, MobileMenu};
pub use modal::{Article, ArticleModal, ArticleModalView, CloseTrigger, DiscordModal};
pub use nav::{NavAction, NavClick, NavSection, SectionTracker, default_navigation};
pub use navbar::{NavbarEffects, NavbarView};
pub use reveal::{HeroEntrance, ScrollReveal};
