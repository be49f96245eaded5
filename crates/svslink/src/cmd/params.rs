use svslink_registry::STANDARD;

use crate::cmd::ParamsArgs;
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{print_params, OutputFormat};

pub fn run(_args: ParamsArgs, format: OutputFormat) -> CliResult<i32> {
    STANDARD
        .check()
        .map_err(|err| registry_error("register map is inconsistent", err))?;
    print_params(STANDARD.iter(), format);
    Ok(SUCCESS)
}
