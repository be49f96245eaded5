use svslink_frame::Hex;
use svslink_session::{Command, MemoryTransport, Session};

use crate::cmd::EncodeArgs;
use crate::exit::{session_error, CliResult, SUCCESS};
use crate::output::{print_encoded, EncodedFrame, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let command =
        Command::from_json(&args.command).map_err(|err| session_error("invalid command", err))?;
    let requests = command
        .requests()
        .map_err(|err| session_error("invalid command", err))?;

    let mut session = Session::new(MemoryTransport::new());
    for request in &requests {
        session
            .send(request)
            .map_err(|err| session_error(&format!("cannot encode {request}"), err))?;
    }

    let frames: Vec<EncodedFrame> = requests
        .iter()
        .zip(session.into_transport().take())
        .map(|(request, frame)| EncodedFrame {
            request: request.to_string(),
            frame_type: request.frame_type().name(),
            frame: Hex(&frame).to_string(),
        })
        .collect();
    print_encoded(&frames, format);

    Ok(SUCCESS)
}
