pub mod u601_match_resume;
