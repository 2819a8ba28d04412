mod demo_banner;
mod error_display;
mod idea_card;
mod idea_form;
mod loading_spinner;

pub use demo_banner::DemoBanner;
pub use error_display::{error_title, ErrorDisplay};
pub use idea_card::IdeaCard;
pub use idea_form::IdeaForm;
pub use loading_spinner::LoadingSpinner;
