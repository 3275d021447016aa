mod intent;
pub use intent::{Intent, Outcome};

mod read;
mod relation;
mod write;

use crate::{Error, Mapper, Result};

impl Mapper {
    /// Execute a batch of intents, strictly in input order, one at a
    /// time, each independent of the others. There is no multi-row
    /// transaction: a failure at intent `i` leaves earlier intents
    /// committed, skips the rest, and surfaces the failing index.
    pub async fn exec_batch(&self, intents: Vec<Intent>) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(intents.len());

        for (index, intent) in intents.into_iter().enumerate() {
            let outcome = self
                .exec_intent(intent)
                .await
                .map_err(|cause| Error::batch(index, cause))?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    async fn exec_intent(&self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::FindAll { model } => Ok(Outcome::Records(self.find_all(&model).await?)),
            Intent::FindOne { model, id } => Ok(Outcome::Record(self.find_one(&model, id).await?)),
            Intent::Create { record } => Ok(Outcome::Record(Some(self.create(&record).await?))),
            Intent::Update { record } => Ok(Outcome::Record(Some(self.update(&record).await?))),
            Intent::Delete { model, id } => {
                self.delete(&model, id).await?;
                Ok(Outcome::Done)
            }
            Intent::SetOne {
                owner,
                relation,
                target,
            } => {
                self.set_one(&owner, &relation, target.as_ref()).await?;
                Ok(Outcome::Done)
            }
            Intent::SetMany {
                owner,
                relation,
                targets,
            } => {
                self.set_many(&owner, &relation, &targets).await?;
                Ok(Outcome::Done)
            }
        }
    }
}
