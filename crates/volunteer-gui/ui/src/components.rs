mod delete_modal;
mod filter_panel;
mod header;
mod pagination;
mod task_card;
mod task_grid;

pub use delete_modal::DeleteModal;
pub use filter_panel::FilterPanel;
pub use header::Header;
pub use pagination::Pagination;
pub use task_card::TaskCard;
pub use task_grid::TaskGrid;
