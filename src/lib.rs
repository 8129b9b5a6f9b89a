pub mod blowup;
