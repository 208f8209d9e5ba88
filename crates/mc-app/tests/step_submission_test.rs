mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use common::{harness, MockMemberApi};
use mc_app::usecases::{RecordOutcome, RecordStatus, SubmitOutcome, UseCases};
use mc_core::errors::{ErrorEnvelope, NotificationLevel};
use mc_core::ids::{MemberId, RecordId};
use mc_core::ports::{ApiError, WriteMode};
use mc_core::records::{Contact, Descendant, FormRow, Job, Membership};
use mc_core::wizard::WizardStep;

fn rejected(errors: Value) -> ApiError {
    ApiError::Rejected {
        status: 400,
        envelope: ErrorEnvelope::from_value(json!({ "message": "Validation failed", "errors": errors })),
    }
}

fn descendant(name: &str) -> FormRow<Descendant> {
    FormRow::new(Descendant {
        name: name.to_string(),
        relation_type: "son".to_string(),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_partial_fan_out_keeps_saved_records_and_maps_failure() {
    common::init_tracing();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .withf(|step, mode, _| *step == WizardStep::Descendants && *mode == WriteMode::Create)
        .returning(move |_, _, body| {
            seen.fetch_add(1, Ordering::SeqCst);
            assert_eq!(body["member_ID"], "LM-9");
            match body["name"].as_str() {
                Some("Ayaan") => Ok(json!({ "id": 11 })),
                Some("Zara") => Ok(json!({ "id": 13 })),
                Some("Noor") => Ok(json!({ "id": 12 })),
                _ => Err(rejected(json!({ "name": ["Name already registered."] }))),
            }
        });

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.enter_route("/member/add").await.unwrap();
    controller.assign_member_id(MemberId::from("LM-9")).await.unwrap();
    controller.set_current_step(WizardStep::Descendants.index()).await.unwrap();

    let submit = use_cases.submit_step(controller.clone());
    let mut form = mc_app::usecases::StepForm::with_rows(vec![
        descendant("Ayaan"),
        descendant("Duplicate"),
        descendant("Zara"),
    ]);

    let outcome = submit.execute(&mut form).await.unwrap();

    let SubmitOutcome::Failed(report) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(
        report.records,
        vec![
            RecordOutcome { index: 0, status: RecordStatus::Saved(Some(RecordId::new(11))) },
            RecordOutcome { index: 1, status: RecordStatus::Failed },
            RecordOutcome { index: 2, status: RecordStatus::Saved(Some(RecordId::new(13))) },
        ]
    );
    assert_eq!(form.errors().get("data.1.name"), Some("Name already registered."));
    assert!(!form.errors().has_record(0));
    assert_eq!(form.rows()[0].id, Some(RecordId::new(11)));
    assert_eq!(form.rows()[1].id, None);
    assert_eq!(form.rows()[2].id, Some(RecordId::new(13)));
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let state = controller.state().await;
    assert_eq!(state.current_step(), WizardStep::Descendants.index());
    assert!(!state.is_completed(WizardStep::Descendants.index()));
    let note = h.inbox.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert_eq!(note.title, "Submission Failed");

    // Only the failed record goes out again.
    form.rows_mut()[1].record.name = "Noor".to_string();
    let outcome = submit.execute(&mut form).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Saved { advanced: true });
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(form.rows().len(), 1);
    assert!(!form.rows()[0].is_saved());
    let state = controller.state().await;
    assert_eq!(state.current_step(), WizardStep::Companion.index());
    assert!(state.is_completed(WizardStep::Descendants.index()));
}

#[tokio::test]
async fn test_partial_fan_out_in_update_mode_invalidates_detail() {
    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .withf(|step, _, _| *step == WizardStep::Descendants)
        .times(2)
        .returning(|_, _, body| match body["name"].as_str() {
            Some("Ayaan") => Ok(json!({ "id": 11 })),
            _ => Err(rejected(json!({ "name": ["Name already registered."] }))),
        });

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.enter_route("/member/update/LM-9").await.unwrap();
    controller.set_current_step(WizardStep::Descendants.index()).await.unwrap();

    let mut form =
        mc_app::usecases::StepForm::with_rows(vec![descendant("Ayaan"), descendant("Duplicate")]);
    let outcome = use_cases.submit_step(controller.clone()).execute(&mut form).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form.rows()[0].id, Some(RecordId::new(11)));
    assert_eq!(*h.cache.invalidated.lock().unwrap(), vec![MemberId::from("LM-9")]);
}

#[tokio::test]
async fn test_fan_out_with_no_saved_record_keeps_cached_detail() {
    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .times(1)
        .returning(|_, _, _| Err(rejected(json!({ "name": ["Name already registered."] }))));

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.enter_route("/member/update/LM-9").await.unwrap();
    controller.set_current_step(WizardStep::Descendants.index()).await.unwrap();

    let mut form = mc_app::usecases::StepForm::with_rows(vec![descendant("Duplicate")]);
    let outcome = use_cases.submit_step(controller).execute(&mut form).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(h.cache.invalidated.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unstructured_failure_shows_detail_verbatim() {
    let mut api = MockMemberApi::new();
    api.expect_write_step().times(1).returning(|_, _, _| {
        Err(ApiError::Rejected {
            status: 403,
            envelope: ErrorEnvelope::from_value(json!({
                "message": "Forbidden",
                "detail": "Member LM-9 is archived and cannot be edited."
            })),
        })
    });

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.assign_member_id(MemberId::from("LM-9")).await.unwrap();

    let mut form = mc_app::usecases::StepForm::with_rows(vec![FormRow::new(Job {
        title: "Engineer".to_string(),
        organization_name: "Grid Co".to_string(),
        ..Default::default()
    })]);
    let outcome = use_cases
        .submit_step(controller)
        .execute(&mut form)
        .await
        .unwrap();

    let SubmitOutcome::Failed(report) = outcome else {
        panic!("expected failure");
    };
    let expected = "Member LM-9 is archived and cannot be edited.";
    assert_eq!(report.notification.as_deref(), Some(expected));
    assert!(report.field_errors.is_empty());
    assert_eq!(h.inbox.last().unwrap().text, expected);
}

#[tokio::test]
async fn test_batch_record_errors_and_top_level_keys() {
    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .withf(|step, _, body| *step == WizardStep::Job && body["data"].as_array().map(Vec::len) == Some(2))
        .returning(|_, _, _| {
            Err(rejected(json!({
                "data": [ {}, { "organization_name": ["Unknown organization."] } ],
                "member_ID": ["Member does not exist."]
            })))
        });

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.assign_member_id(MemberId::from("LM-404")).await.unwrap();

    let job = |title: &str| {
        FormRow::new(Job {
            title: title.to_string(),
            organization_name: "Org".to_string(),
            ..Default::default()
        })
    };
    let mut form = mc_app::usecases::StepForm::with_rows(vec![job("Analyst"), job("Lead")]);

    let outcome = use_cases.submit_step(controller).execute(&mut form).await.unwrap();

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(form.errors().get("data.1.organization_name"), Some("Unknown organization."));
    assert_eq!(h.inbox.last().unwrap().text, "member_ID: Member does not exist.");
}

#[tokio::test]
async fn test_single_record_field_errors_use_bare_names() {
    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .withf(|step, _, body| *step == WizardStep::Membership && body.get("data").is_none())
        .returning(|_, _, _| Err(rejected(json!({ "first_name": ["Too long."] }))));

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.assign_member_id(MemberId::from("LM-1")).await.unwrap();

    let mut form = mc_app::usecases::StepForm::with_rows(vec![FormRow::new(Membership {
        first_name: "A".repeat(300),
        last_name: "Rahman".to_string(),
        gender: "male".to_string(),
        membership_type: "Life Member".to_string(),
        institute_name: "BUET".to_string(),
        ..Default::default()
    })]);

    use_cases.submit_step(controller).execute(&mut form).await.unwrap();

    assert_eq!(form.errors().get("first_name"), Some("Too long."));
    assert_eq!(h.inbox.last().unwrap().text, "Please correct the highlighted fields.");
}

#[tokio::test]
async fn test_client_validation_blocks_request() {
    let mut api = MockMemberApi::new();
    api.expect_write_step().never();

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.assign_member_id(MemberId::from("LM-1")).await.unwrap();

    let mut form = mc_app::usecases::StepForm::<Contact>::new();
    let outcome = use_cases.submit_step(controller).execute(&mut form).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.errors().get("data.0.number"), Some("This field is required."));
    assert!(h.inbox.last().is_none());
}

#[tokio::test]
async fn test_update_contact_saves_in_place() {
    let mut api = MockMemberApi::new();
    api.expect_write_step()
        .withf(|step, mode, body| {
            *step == WizardStep::Contact && *mode == WriteMode::Update && body["data"][0]["id"] == 5
        })
        .times(1)
        .returning(|_, _, body| Ok(body["data"].clone()));

    let h = harness(api);
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();
    controller.enter_route("/member/update/LM-5").await.unwrap();
    controller.set_current_step(WizardStep::Contact.index()).await.unwrap();

    let mut row = FormRow::new(Contact {
        contact_type: "mobile".to_string(),
        number: "+880 1711 000000".to_string(),
        is_primary: true,
    });
    row.id = Some(RecordId::new(5));
    let mut form = mc_app::usecases::StepForm::with_rows(vec![row]);

    let outcome = use_cases.submit_step(controller.clone()).execute(&mut form).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Saved { advanced: false });
    assert_eq!(form.rows()[0].id, Some(RecordId::new(5)));
    assert_eq!(controller.state().await.current_step(), WizardStep::Contact.index());
    assert_eq!(*h.cache.invalidated.lock().unwrap(), vec![MemberId::from("LM-5")]);
    assert_eq!(h.inbox.last().unwrap().level, NotificationLevel::Success);
}

#[tokio::test]
async fn test_submit_without_member_is_an_error() {
    let h = harness(MockMemberApi::new());
    let use_cases = UseCases::new(&h.deps);
    let controller = use_cases.wizard_controller();

    let mut form = mc_app::usecases::StepForm::with_rows(vec![FormRow::new(Job {
        title: "Engineer".to_string(),
        organization_name: "Grid Co".to_string(),
        ..Default::default()
    })]);
    let err = use_cases.submit_step(controller).execute(&mut form).await.unwrap_err();

    assert!(matches!(err, mc_app::usecases::SubmitStepError::NoActiveMember));
}
