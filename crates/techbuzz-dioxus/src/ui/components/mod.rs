mod card;
mod catalog_view;
mod code_samples;
mod footer;
mod formatted_content;
mod hamburger_menu;
mod live_editor;
mod map_embed;
mod navbar;
mod not_found;
mod python_runner;
mod ripple;
mod static_page;
mod tutorial_extras;

pub use card::Card;
pub use catalog_view::CatalogView;
pub use code_samples::CodeSamplesView;
pub use footer::Footer;
pub use formatted_content::FormattedContent;
pub use hamburger_menu::HamburgerMenu;
pub use live_editor::LiveEditor;
pub use map_embed::MapEmbed;
pub use navbar::Navbar;
pub use not_found::NotFoundNotice;
pub use python_runner::PythonRunner;
pub use ripple::Ripple;
pub use static_page::StaticPageView;
pub use tutorial_extras::TutorialExtras;
