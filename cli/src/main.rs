mod commands;
mod terminal;

use commands::{CommandLine, Commands, freq, islands, list, power, sort, stack};
use labkit_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(&cfg);

    let result = match commands.command {
        Commands::Power { base, exponent } => {
            print::header("fast power", &cfg);
            power::power(base, exponent);
            Ok(())
        }
        Commands::List { ops } => {
            print::header("doubly linked list", &cfg);
            list::list(ops);
            Ok(())
        }
        Commands::Islands { grid } => {
            print::header("island counter", &cfg);
            islands::islands(&grid, &cfg)
        }
        Commands::Stack { values, pop } => {
            print::header("linked stack", &cfg);
            stack::stack(values, pop);
            Ok(())
        }
        Commands::Freq { values } => {
            print::header("frequency count", &cfg);
            freq::freq(&values);
            Ok(())
        }
        Commands::Sort {
            algorithm,
            size,
            values,
        } => {
            print::header("sort trace", &cfg);
            sort::sort(algorithm, size, values, &cfg)
        }
    };

    print::end_of_program(&cfg);
    result
}
