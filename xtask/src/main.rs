use std::path::PathBuf;
use std::process::{Command, ExitCode};
use std::sync::mpsc::channel;
use std::sync::{Arc, Mutex};
use std::thread;

use clap::Parser;
use common::clone;

#[derive(clap::Parser, Debug)]
struct Args {
  #[command(subcommand)]
  pub cmd: Cmd,
}

#[derive(clap::Subcommand, Debug)]
enum Cmd {
  /// Serve the client with trunk, rebuilding on change
  Serve,
  /// Produce a release build under client/dist
  Dist,
}

fn main() -> ExitCode {
  let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  root.pop();
  let client_dir = root.join("client");
  match Args::parse().cmd {
    Cmd::Serve => {
      let trunk = Arc::new(Mutex::new(
        Command::new("trunk").args(["serve"]).current_dir(client_dir).spawn().unwrap(),
      ));
      let (snd, recv) = channel();
      let snd = Arc::new(snd);
      thread::spawn(clone!(trunk, snd; move || {
        trunk.lock().unwrap().wait().unwrap();
        snd.send(()).unwrap()
      }));
      ctrlc::set_handler(move || snd.send(()).unwrap()).unwrap();
      recv.recv().unwrap();
      let _ = trunk.lock().unwrap().kill();
      ExitCode::SUCCESS
    },
    Cmd::Dist => ExitCode::from(
      Command::new("trunk")
        .args(["build", "--release"])
        .current_dir(client_dir)
        .spawn()
        .unwrap()
        .wait()
        .unwrap()
        .code()
        .unwrap_or(1) as u8,
    ),
  }
}
