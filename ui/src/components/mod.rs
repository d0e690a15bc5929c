pub mod guide_card;
pub mod guide_modal;
pub mod html_content;
pub mod nav_bar;

pub use guide_card::GuideCard;
pub use guide_modal::GuideModal;
pub use html_content::HtmlContent;
pub use nav_bar::NavBar;
