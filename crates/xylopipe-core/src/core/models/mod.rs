pub mod features;
pub mod record;
pub mod residue;
pub mod sequence;
