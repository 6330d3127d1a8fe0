mod pair_actor;

pub use pair_actor::PairActor;
