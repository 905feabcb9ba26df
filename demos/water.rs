//! Water phases
//!
//! Walks a small cyclic machine through phase changes, including a named
//! transition and a refused step.
//!
//! Run with: cargo run --example water

use fsm_engine::builder::named_transition;
use fsm_engine::{Machine, MachineOptions, State};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fsm_engine=debug".parse().expect("valid directive")),
        )
        .init();

    let mut machine = Machine::with_options(
        [
            State::new("solid").to("liquid").initial(),
            State::new("liquid")
                .transition(named_transition("freeze", "solid"))
                .to("gas"),
            State::new("gas").to("liquid"),
        ],
        MachineOptions::new()
            .init_result(0usize)
            .calculate_result(|changes: &usize, _: &&str| changes + 1)
            .on_unsupported_transition(|from, trigger| {
                println!("refused {trigger:?} after {from:?}");
            }),
    )
    .expect("water machine is well formed");

    for phase in ["gas", "liquid", "gas", "gas", "liquid"] {
        println!("go({phase}) -> {}", machine.go(phase));
    }
    println!("run(freeze) -> {}", machine.run("freeze"));

    println!("history: {:?}", machine.history());
    println!("path: {:?}", machine.state_history().path());
    println!("phase changes: {}", machine.result());
}
