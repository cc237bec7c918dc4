mod circle;
mod segment;

pub use circle::Circle;
pub use segment::Segment;
