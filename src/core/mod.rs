pub mod aggregator;
pub mod bootstrap;
pub mod external_ip;
pub mod messages;
pub mod static_nodes;
pub mod teachers;

pub use crate::domain::model::{
    Color, Domain, StaticNodes, TeacherConnection, TeacherNode, TeacherPolicy, TeacherUri,
};
pub use crate::domain::ports::{Emitter, Prompter, TeacherFactory};
pub use crate::utils::error::Result;
