use anyhow::Result;

use crate::store::LedgerStore;

pub trait ActionProcessor<Config, Output> {
    async fn process<S: LedgerStore + Send>(&self, local_config: &mut Config, store: &mut S) -> Result<Output>;
}
