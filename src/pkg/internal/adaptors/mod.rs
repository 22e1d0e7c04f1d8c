pub mod jobs;
pub mod site_content;
pub mod team_members;
