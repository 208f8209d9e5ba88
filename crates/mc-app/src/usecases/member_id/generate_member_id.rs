use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use mc_core::errors::Notification;
use mc_core::ids::MemberId;
use mc_core::ports::{ApiError, MemberApiPort, NextMemberIdRequest, NotificationPort};
use mc_core::wizard::WizardError;

use crate::usecases::wizard::WizardController;

#[derive(Debug, Error)]
pub enum GenerateMemberIdError {
    #[error("{0} is required to generate a member id")]
    MissingField(&'static str),

    #[error("failed to generate member id: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Ask the backend for the next free member id and make it the wizard's
/// active member.
pub struct GenerateMemberId {
    member_api: Arc<dyn MemberApiPort>,
    controller: Arc<WizardController>,
    notifier: Arc<dyn NotificationPort>,
}

impl GenerateMemberId {
    pub fn new(
        member_api: Arc<dyn MemberApiPort>,
        controller: Arc<WizardController>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            member_api,
            controller,
            notifier,
        }
    }

    pub async fn execute(
        &self,
        request: NextMemberIdRequest,
    ) -> Result<MemberId, GenerateMemberIdError> {
        let span = info_span!(
            "usecase.generate_member_id.execute",
            membership_type = %request.membership_type,
            institute = %request.institute_name
        );
        async {
            if request.membership_type.trim().is_empty() {
                return Err(GenerateMemberIdError::MissingField("membership_type"));
            }
            if request.institute_name.trim().is_empty() {
                return Err(GenerateMemberIdError::MissingField("institute_name"));
            }

            let member_id = match self.member_api.next_available_member_id(&request).await {
                Ok(member_id) => member_id,
                Err(err) => {
                    warn!(error = %err, "member id generation failed");
                    self.notifier.notify(Notification::error(
                        "Member ID",
                        err.envelope().fallback_text(),
                    ));
                    return Err(err.into());
                }
            };

            self.controller.assign_member_id(member_id.clone()).await?;
            info!(member_id = %member_id, "member id assigned");
            Ok(member_id)
        }
        .instrument(span)
        .await
    }
}
