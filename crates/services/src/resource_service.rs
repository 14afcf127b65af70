use chrono::{DateTime, Utc};

use study_core::Clock;
use study_core::model::{ResourceError, StudyResource, StudyResourceDraft};

/// A resource that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedResource {
    pub resource: StudyResource,
    pub received_at: DateTime<Utc>,
}

/// Validates intake form submissions and logs them.
///
/// Nothing is stored: an accepted resource is handed back to the caller
/// and forgotten.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceIntakeService {
    clock: Clock,
}

impl ResourceIntakeService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// # Errors
    ///
    /// Returns `ResourceError` when the draft fails validation.
    pub fn submit(&self, draft: StudyResourceDraft) -> Result<AcceptedResource, ResourceError> {
        let resource = draft.validate().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected study resource");
        })?;
        let received_at = self.clock.now();

        tracing::info!(
            title = resource.title(),
            subject = %resource.subject(),
            topic = resource.topic(),
            link = resource.link().map(|url| url.as_str()),
            rating = resource.rating().map(|r| r.stars()),
            question_type = resource.question_type().map(|q| q.label()),
            %received_at,
            "saving resource"
        );

        Ok(AcceptedResource {
            resource,
            received_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{ResourceField, Subject};
    use study_core::time::fixed_now;

    #[test]
    fn accepted_resource_carries_receipt_time() {
        let service = ResourceIntakeService::new(Clock::fixed(fixed_now()));
        let accepted = service
            .submit(StudyResourceDraft {
                title: "Cell Biology Notes".into(),
                subject: "Biology".into(),
                topic: "Mitosis".into(),
                ..StudyResourceDraft::default()
            })
            .unwrap();
        assert_eq!(accepted.received_at, fixed_now());
        assert_eq!(accepted.resource.subject(), Subject::Biology);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let service = ResourceIntakeService::default();
        let err = service.submit(StudyResourceDraft::default()).unwrap_err();
        assert_eq!(
            err,
            ResourceError::MissingRequired(vec![
                ResourceField::Title,
                ResourceField::Subject,
                ResourceField::Topic
            ])
        );
    }
}
