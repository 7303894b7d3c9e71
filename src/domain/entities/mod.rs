pub mod job;
pub mod output_record;
pub mod row;
