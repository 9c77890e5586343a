use colored::*;

use super::print;

const BANNER: &str = r#"
   _____       _     _            _____                 
  / ____|     (_)   | |          / ____|                
 | (___  _ __  _  __| | ___ _ __| (___   ___ __ _ _ __  
  \___ \| '_ \| |/ _` |/ _ \ '__|\___ \ / __/ _` | '_ \ 
  ____) | |_) | | (_| |  __/ |   ____) | (_| (_| | | | |
 |_____/| .__/|_|\__,_|\___|_|  |_____/ \___\__,_|_| |_|
        | |                                             
        |_|                                             
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
