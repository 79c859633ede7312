pub mod events;
pub mod handler;

// Re-export the essential types
pub use events::InputEvent;
pub use handler::InputHandler;
