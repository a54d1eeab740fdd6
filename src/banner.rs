// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
   _                  ____  _     
  (_) __ ___   ____ _|___ \(_)___ 
  | |/ _` \ \ / / _` | __) | / __|
  | | (_| |\ V / (_| |/ __/| \__ \
 _/ |\__,_| \_/ \__,_|_____/ |___/
|__/                     |__/     

    Java to JavaScript AI Converter
"#;
    println!("{}", banner);
}
