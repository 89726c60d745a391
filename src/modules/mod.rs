pub mod ad;

mod router;
pub use router::get_router;
