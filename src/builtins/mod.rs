//! Built-in validators
//!
//! - `tabs` - tab in the indentation before the first space
//! - `whitespace` - trailing whitespace
//! - `blank_eof` - file ends with blank lines
//! - `merge_conflict` - leftover conflict markers
//! - `nb_space` - non-breaking spaces
//!
//! Command validators declared in config (`[validators.<name>]`) are
//! registered through [`register_command`].

mod command;
mod text;

pub use command::CommandValidator;
pub use text::{BlankEof, MergeConflict, NbSpace, Tabs, Whitespace};

use crate::config::CommandSpec;
use crate::registry::ValidatorRegistry;
use crate::validator::{Validator, ValidatorContext};

pub fn register_builtins(registry: &mut ValidatorRegistry) {
    registry.register(Tabs::NAME, |_: &ValidatorContext| Box::new(Tabs) as Box<dyn Validator>);
    registry.register(Whitespace::NAME, |_: &ValidatorContext| {
        Box::new(Whitespace) as Box<dyn Validator>
    });
    registry.register(BlankEof::NAME, |_: &ValidatorContext| {
        Box::new(BlankEof) as Box<dyn Validator>
    });
    registry.register(MergeConflict::NAME, |_: &ValidatorContext| {
        Box::new(MergeConflict) as Box<dyn Validator>
    });
    registry.register(NbSpace::NAME, |_: &ValidatorContext| {
        Box::new(NbSpace) as Box<dyn Validator>
    });
}

pub fn register_command(registry: &mut ValidatorRegistry, name: &str, spec: CommandSpec) {
    let owned = name.to_string();
    registry.register(name, move |_: &ValidatorContext| {
        Box::new(CommandValidator::new(owned.clone(), spec.clone())) as Box<dyn Validator>
    });
}
