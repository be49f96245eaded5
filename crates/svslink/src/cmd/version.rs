use svslink_transport::LinkConfig;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("svslink {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    let link = LinkConfig::default();
    println!("name: svslink");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("SVSLINK_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!("registry_size: {}", svslink_registry::STANDARD.len());
    println!("service_uuid: {}", link.service_uuid);
    println!("characteristic_uuid: {}", link.characteristic_uuid);

    Ok(SUCCESS)
}
