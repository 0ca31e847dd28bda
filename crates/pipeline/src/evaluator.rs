//! Reading evaluation with recipient resolution.

use futures::future::join_all;
use plantwatch_core::evaluation::out_of_range;
use plantwatch_core::roles::roles_authorized_for;
use plantwatch_core::{Reading, Violation};

use crate::resolver::RecipientResolver;

/// Produces the ordered violation list for a reading.
#[derive(Clone)]
pub struct ViolationEvaluator {
    resolver: RecipientResolver,
}

impl ViolationEvaluator {
    pub fn new(resolver: RecipientResolver) -> Self {
        Self { resolver }
    }

    /// Evaluate `reading` against the range table and resolve who to alert.
    ///
    /// Violations come back in parameter declaration order. Lookups for
    /// different parameters run concurrently; `join_all` keeps their order.
    /// A failed lookup still yields the violation, flagged as unresolved.
    pub async fn evaluate(&self, reading: &Reading) -> Vec<Violation> {
        let lookups = out_of_range(reading).into_iter().map(|found| async move {
            tracing::warn!(
                parameter = %found.parameter,
                value = found.value,
                low = found.range.low,
                high = found.range.high,
                "Critical value detected"
            );

            let roles = roles_authorized_for(found.parameter);
            match self.resolver.resolve(roles).await {
                Ok(recipients) => {
                    if recipients.is_empty() {
                        tracing::warn!(
                            parameter = %found.parameter,
                            ?roles,
                            "No recipients hold an authorized role"
                        );
                    }
                    Violation::new(found.parameter, found.value, recipients)
                }
                Err(e) => {
                    tracing::warn!(
                        parameter = %found.parameter,
                        error = %e,
                        "Recipient lookup failed, violation will not be notified"
                    );
                    Violation::unresolved(found.parameter, found.value)
                }
            }
        });
        join_all(lookups).await
    }
}
