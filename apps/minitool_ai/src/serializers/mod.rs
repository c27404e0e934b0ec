pub mod minitool_text;
