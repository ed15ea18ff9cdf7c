use anagen::util::{Error, Result};
use std::env;

pub mod args;
mod candidates_main;
mod cmdlist;
mod find_main;
pub mod globals;
use crate::globals::Settings;

fn main() {
    globals::init_logging();
    let mut settings = Settings::new();
    match inner_main(env::args().collect(), &mut settings) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(mut args: Vec<String>, settings: &mut Settings) -> Result<()> {
    if args.len() < 2 {
        // no subcommand, behave like a plain interactive 'find'
        return find_main::main(&args, settings);
    }
    if args[1] == "help" || args[1] == "--help" {
        println!("USAGE : anagen <command> [options...]");
        println!("Commands are :");
        for x in cmdlist::MAINLIST {
            println!("{:10} : {}", x.name, x.help);
        }
        return Ok(());
    }
    if args[1] == "version" || args[1] == "--version" {
        println!("anagen version {}", args::version());
        return Ok(());
    }
    for x in cmdlist::MAINLIST {
        if args[1] == x.name {
            let arg1 = args.remove(1);
            args[0] += " ";
            args[0] += &arg1;
            return (x.proc)(&args, settings);
        }
    }
    eprintln!("Valid subcommands are :");
    for x in cmdlist::MAINLIST {
        eprintln!("{:10} : {}", x.name, x.help);
    }
    Err(Error::Silent)
}
