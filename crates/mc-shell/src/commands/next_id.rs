use anyhow::Context;

use mc_app::usecases::UseCases;
use mc_app::AppDeps;
use mc_core::ids::MemberId;
use mc_core::ports::NextMemberIdRequest;

/// Next free member id for a membership type and institute.
pub async fn next_member_id(
    deps: &AppDeps,
    membership_type: String,
    institute_name: String,
) -> anyhow::Result<MemberId> {
    let use_cases = UseCases::new(deps);
    let controller = use_cases.wizard_controller();
    use_cases
        .generate_member_id(controller)
        .execute(NextMemberIdRequest {
            membership_type,
            institute_name,
        })
        .await
        .context("Failed to generate member id")
}
