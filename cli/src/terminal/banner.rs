use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
              __          __    __   _ __
             / /   ____ _/ /_  / /__(_) /_
            / /   / __ `/ __ \/ //_/ / __/
           / /___/ /_/ / /_/ / ,< / / /_
          /_____/\__,_/_.___/_/|_/_/\__/
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
