mod event;
pub use event::Event;

mod venue;
pub use venue::Venue;
