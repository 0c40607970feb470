pub mod bitvec;
pub mod edit;
pub mod graph;
pub mod markov;
pub mod network;
pub mod partial_order;
pub mod variable;
