//! Parallel construction of many operators at once.
//!
//! Every builder in this crate is a pure function of its parameters, so a list
//! of gates or channels can be materialized on a thread pool. Output order
//! always follows input order, and a failure in one element does not affect
//! the others.

use rayon::prelude::*;
use tracing::debug;
use crate::{
    channel::Mixture,
    config::OpConfig,
    error::QuditResult,
    gate::{ Action, Channel, Gate, Operation, QuditOperation },
    linalg::Matrix,
};

/// Materialize the unitaries of `gates` in parallel under `cfg`.
pub fn unitaries_with(gates: &[Gate], cfg: &OpConfig)
    -> Vec<QuditResult<Matrix>>
{
    debug!(count = gates.len(), "building unitaries");
    gates.par_iter().map(|g| g.unitary_with(cfg)).collect()
}

/// Materialize the unitaries of `gates` in parallel in double precision.
pub fn unitaries(gates: &[Gate]) -> Vec<QuditResult<Matrix>> {
    unitaries_with(gates, &OpConfig::default())
}

/// Materialize the mixtures of `channels` in parallel under `cfg`.
pub fn mixtures_with(channels: &[Channel], cfg: &OpConfig)
    -> Vec<QuditResult<Mixture>>
{
    debug!(count = channels.len(), "building mixtures");
    channels.par_iter().map(|c| c.mixture_with(cfg)).collect()
}

/// Materialize the mixtures of `channels` in parallel in double precision.
pub fn mixtures(channels: &[Channel]) -> Vec<QuditResult<Mixture>> {
    mixtures_with(channels, &OpConfig::default())
}

/// Materialize a heterogeneous list of operations in parallel under `cfg`.
pub fn actions_with(ops: &[Operation], cfg: &OpConfig)
    -> Vec<QuditResult<Action>>
{
    debug!(count = ops.len(), "building actions");
    ops.par_iter().map(|op| op.action_with(cfg)).collect()
}
