pub mod a001_young_spec;
pub mod a002_young_spec_line;
