#![allow(dead_code)]

mod catalog;
mod common;
mod config;
mod controller;
mod ndarray_image;
mod plot;
mod progress;
mod ticker;
mod xorshift;

use std::io::Write;

use log::{info,error};
use pico_args::Arguments;

use catalog::{TRIPLES,STEPS};
use common::*;
use config::{Config,Loadable};
use controller::{Controller,Selection};

const USAGE:&str = "\
Usage: xorplay [OPTIONS]
  --config PATH    load settings from a RON file
  --seed N         generator seed (32-bit unsigned, default 1)
  --triple I       shift-triple index (see --list)
  --step J         update-ordering index (see --list)
  --samples N      number of draws in batch mode
  --delay MS       delay between draws in milliseconds
  --output PATH    scatter plot PNG path
  --size N         plot size in pixels
  --list           print the parameter catalog and exit
  --interactive    read commands from stdin
";

fn main()->Res<()> {
    simple_logger::SimpleLogger::new().init()?;

    let res = main0();
    if let Err(e) = &res {
	error!("{}",e);
    }

    res
}

fn main0()->Res<()> {
    let mut args = Arguments::from_env();

    if args.contains(["-h","--help"]) {
	print!("{}",USAGE);
	return Ok(());
    }

    if args.contains("--list") {
	list_catalog();
	return Ok(());
    }

    let config = match args.opt_value_from_str::<_,String>("--config")? {
	Some(path)=>{
	    info!("Loading configuration from {}",path);
	    Config::load(&path)?
	},
	None=>Config::default()
    };

    let seed : u32 = args.opt_value_from_str("--seed")?.unwrap_or(config.seed);
    let triple : usize = args.opt_value_from_str("--triple")?.unwrap_or(config.triple);
    let step : usize = args.opt_value_from_str("--step")?.unwrap_or(config.step);
    let samples : usize = args.opt_value_from_str("--samples")?.unwrap_or(config.samples);
    let delay : u64 = args.opt_value_from_str("--delay")?.unwrap_or(config.delay);
    let output : String = args.opt_value_from_str("--output")?.unwrap_or(config.output);
    let size : usize = args.opt_value_from_str("--size")?.unwrap_or(config.size);
    let interactive = args.contains("--interactive");

    let mut ctl = Controller::new(Selection{ seed,triple,step,delay_ms:delay })?;

    if interactive {
	repl(&mut ctl,size,&output)
    } else {
	let t = catalog::triple(triple)?;
	let s = catalog::step(step)?;
	info!("Triple {} = ({},{},{}), step {} = {}, seed {}",
	      triple,t.a,t.b,t.c,step,s.label,seed);
	ctl.run(samples);
	info!("Drew {} samples, last draw {}",
	      ctl.num_samples(),
	      ctl.last_draw().map_or("none".to_string(),|y| y.to_string()));
	plot::save_scatter(ctl.history(),size,&output)?;
	info!("Wrote scatter plot to {}",output);
	Ok(())
    }
}

fn list_catalog() {
    println!("Shift triples:");
    for (i,t) in TRIPLES.iter().enumerate() {
	println!("{:3}  {:2},{:2},{:2}",i,t.a,t.b,t.c);
    }
    println!("Update steps:");
    for (i,s) in STEPS.iter().enumerate() {
	println!("{:3}  {}",i,s.label);
    }
}

fn print_status(ctl:&Controller) {
    let sel = ctl.selection();
    let t = TRIPLES[sel.triple];
    let s = &STEPS[sel.step];
    println!("triple  {} = ({},{},{})",sel.triple,t.a,t.b,t.c);
    println!("step    {} = {}",sel.step,s.label);
    println!("seed    {}",sel.seed);
    println!("delay   {} ms",sel.delay_ms);
    println!("samples {}",ctl.num_samples());
    match ctl.last_draw() {
	Some(y)=>println!("last draw {} ({:08x})",y,y),
	None=>println!("last draw none")
    }
}

// Stand-in for the browser controls: selection commands replace the
// generator and clear the history, a delay command only reschedules
fn execute(ctl:&mut Controller,size:usize,output:&mut String,words:&[&str])->Res<bool> {
    match words {
	[] => (),
	["quit"] | ["q"] => return Ok(true),
	["list"] => list_catalog(),
	["info"] => print_status(ctl),
	["seed",u] => ctl.set_seed(u.parse()?)?,
	["triple",u] => ctl.set_triple(u.parse()?)?,
	["step",u] => ctl.set_step(u.parse()?)?,
	["delay",u] => ctl.set_delay(u.parse()?),
	["run",u] => {
	    let n : usize = u.parse()?;
	    ctl.run(n);
	    plot::save_scatter(ctl.history(),size,output)?;
	    print_status(ctl);
	},
	["plot"] => {
	    plot::save_scatter(ctl.history(),size,output)?;
	    println!("Wrote {}",output);
	},
	["plot",path] => {
	    *output = path.to_string();
	    plot::save_scatter(ctl.history(),size,output)?;
	    println!("Wrote {}",output);
	},
	_ => return Err(error(&format!("Unknown command: {}",words.join(" "))))
    }
    Ok(false)
}

fn repl(ctl:&mut Controller,size:usize,output:&str)->Res<()> {
    let mut output = output.to_string();
    let stdin = std::io::stdin();
    println!("Commands: seed N | triple I | step J | delay MS | run N | \
	      plot [PATH] | info | list | quit");
    loop {
	print!("> ");
	std::io::stdout().flush()?;
	let mut line = String::new();
	if stdin.read_line(&mut line)? == 0 {
	    return Ok(());
	}
	let words : Vec<&str> = line.split_whitespace().collect();
	match execute(ctl,size,&mut output,&words) {
	    Ok(true)=>return Ok(()),
	    Ok(false)=>(),
	    Err(e)=>println!("Error: {}",e)
	}
    }
}
