pub mod admin;
pub mod enquiry;
pub mod jobs;
pub mod probes;
pub mod site_content;
pub mod team_members;
