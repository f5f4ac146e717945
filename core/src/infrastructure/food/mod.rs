pub mod repository;

pub use repository::PostgresFoodItemRepository;
