use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

use xid_tables_prepare::logging;
use xid_tables_prepare::{Classification, Generator, OutputFormat};

/// код выхода при ошибке использования и при ошибке генерации
const FAILURE_EXIT_CODE: i32 = 1;

/// генератор упакованных таблиц XID_START / XID_CONTINUE
#[derive(Debug, Parser)]
#[command(name = "xid-tables", version)]
struct Cli
{
    /// XID_START или XID_CONTINUE
    #[arg(value_name = "CLASSIFICATION")]
    classification: Classification,

    /// язык сгенерированного файла
    #[arg(long, value_enum, default_value_t = OutputFormat::C)]
    format: OutputFormat,

    /// каталог со списками диапазонов <NAME>.txt
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// каталог для сгенерированных файлов
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// подробнее (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// только предупреждения и ошибки
    #[arg(short, long)]
    quiet: bool,
}

fn main()
{
    // clap по умолчанию завершается с кодом 2, нам нужен 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(match err.use_stderr() {
                true => FAILURE_EXIT_CODE,
                false => 0,
            });
        }
    };

    logging::setup_logging(logging::level(cli.verbose, cli.quiet));

    let generator = Generator {
        classification: cli.classification,
        format: cli.format,
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
    };

    if let Err(err) = generator.run() {
        let mut message = err.to_string();
        let mut source = err.source();

        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        error!("{}", message);
        process::exit(FAILURE_EXIT_CODE);
    }
}
