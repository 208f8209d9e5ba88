//! Wizard state machine.
//!
//! Defines a pure state transition function for the member wizard.

use serde::Serialize;

use super::{WizardError, WizardRoute, WizardState, WizardStep};
use crate::ids::MemberId;

/// Events that drive the wizard.
///
/// 驱动向导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The wizard page mounted under `route`.
    ///
    /// 向导页面挂载。
    RouteEntered { route: WizardRoute },
    /// The wizard page is unmounting; `next` is where the user is going.
    ///
    /// 向导页面卸载。
    RouteLeft { next: WizardRoute },
    /// Advance without persisting.
    ///
    /// 跳过当前步骤。
    Skip,
    /// Step-indicator click.
    ///
    /// 直接跳转到某一步。
    JumpTo { index: usize },
    /// A step's records were persisted.
    ///
    /// 某一步保存成功。
    StepSaved { step: WizardStep },
    /// The ID generation flow produced an identifier.
    ///
    /// 成员 ID 已生成。
    MemberIdAssigned { member_id: MemberId },
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WizardAction {
    /// Drop the cached member detail so other steps refetch.
    ///
    /// 使成员详情缓存失效。
    InvalidateMemberDetail { member_id: MemberId },
    /// Abandon every in-flight request of this wizard instance.
    ///
    /// 取消所有进行中的请求。
    CancelInFlight,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        mut state: WizardState,
        event: WizardEvent,
    ) -> Result<(WizardState, Vec<WizardAction>), WizardError> {
        let mut actions = Vec::new();

        match event {
            WizardEvent::RouteEntered { route } => {
                state.reset_progress();
                if let WizardRoute::Update { member_id } = route {
                    if state.member_id() != Some(&member_id) {
                        if state.member_id().is_some() {
                            actions.push(WizardAction::CancelInFlight);
                        }
                        state.set_member_id(member_id);
                    }
                    state.set_update_mode(true)?;
                }
            }
            WizardEvent::RouteLeft { next } => {
                if !next.is_update() {
                    state.clear_member_id();
                }
                actions.push(WizardAction::CancelInFlight);
            }
            WizardEvent::Skip => state.next_step(),
            WizardEvent::JumpTo { index } => state.set_current_step(index)?,
            WizardEvent::StepSaved { step } => {
                if state.is_update_mode() {
                    let member_id = state.member_id().cloned().ok_or(WizardError::MissingMemberId)?;
                    actions.push(WizardAction::InvalidateMemberDetail { member_id });
                    if step.advances_on_update() {
                        state.mark_step_completed(step.index())?;
                        state.next_step();
                    }
                } else {
                    state.mark_step_completed(step.index())?;
                    state.next_step();
                }
            }
            WizardEvent::MemberIdAssigned { member_id } => state.set_member_id(member_id),
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            current_step = state.current_step(),
            update_mode = state.is_update_mode(),
            actions = actions.len(),
            "wizard transition applied"
        );

        Ok((state, actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_state(id: &str) -> WizardState {
        let (state, _) = WizardStateMachine::transition(
            WizardState::new(),
            WizardEvent::RouteEntered {
                route: WizardRoute::Update {
                    member_id: MemberId::from(id),
                },
            },
        )
        .unwrap();
        state
    }

    #[test]
    fn test_enter_update_route_sets_identity() {
        let state = update_state("LM-5");
        assert_eq!(state.member_id(), Some(&MemberId::from("LM-5")));
        assert!(state.is_update_mode());
    }

    #[test]
    fn test_enter_add_route_stays_in_create_mode() {
        let (state, actions) = WizardStateMachine::transition(
            WizardState::new(),
            WizardEvent::RouteEntered {
                route: WizardRoute::Add,
            },
        )
        .unwrap();
        assert!(!state.is_update_mode());
        assert!(state.member_id().is_none());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_switching_member_cancels_in_flight() {
        let state = update_state("LM-5");
        let (state, actions) = WizardStateMachine::transition(
            state,
            WizardEvent::RouteEntered {
                route: WizardRoute::Update {
                    member_id: MemberId::from("LM-6"),
                },
            },
        )
        .unwrap();
        assert_eq!(state.member_id(), Some(&MemberId::from("LM-6")));
        assert_eq!(actions, vec![WizardAction::CancelInFlight]);
    }

    #[test]
    fn test_reentering_same_member_keeps_identity_without_cancel() {
        let state = update_state("LM-5");
        let (state, actions) = WizardStateMachine::transition(
            state,
            WizardEvent::RouteEntered {
                route: WizardRoute::Update {
                    member_id: MemberId::from("LM-5"),
                },
            },
        )
        .unwrap();
        assert_eq!(state.member_id(), Some(&MemberId::from("LM-5")));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_leaving_to_non_update_route_resets_identity() {
        let state = update_state("LM-5");
        let (state, actions) = WizardStateMachine::transition(
            state,
            WizardEvent::RouteLeft {
                next: WizardRoute::Other,
            },
        )
        .unwrap();
        assert!(state.member_id().is_none());
        assert!(!state.is_update_mode());
        assert_eq!(actions, vec![WizardAction::CancelInFlight]);
    }

    #[test]
    fn test_leaving_to_update_route_keeps_identity() {
        let state = update_state("LM-5");
        let (state, _) = WizardStateMachine::transition(
            state,
            WizardEvent::RouteLeft {
                next: WizardRoute::Update {
                    member_id: MemberId::from("LM-7"),
                },
            },
        )
        .unwrap();
        assert_eq!(state.member_id(), Some(&MemberId::from("LM-5")));
    }

    #[test]
    fn test_skip_does_not_mark_completed() {
        let (state, _) =
            WizardStateMachine::transition(WizardState::new(), WizardEvent::Skip).unwrap();
        assert_eq!(state.current_step(), 1);
        assert!(state.completed_steps().is_empty());
    }

    #[test]
    fn test_create_mode_save_advances_and_completes() {
        let (state, actions) = WizardStateMachine::transition(
            WizardState::new(),
            WizardEvent::StepSaved {
                step: WizardStep::Membership,
            },
        )
        .unwrap();
        assert_eq!(state.current_step(), 1);
        assert!(state.is_completed(0));
        assert!(actions.is_empty());
    }

    #[test]
    fn test_update_mode_contact_save_stays_in_place() {
        let mut state = update_state("LM-5");
        state.set_current_step(1).unwrap();
        let (state, actions) = WizardStateMachine::transition(
            state,
            WizardEvent::StepSaved {
                step: WizardStep::Contact,
            },
        )
        .unwrap();
        assert_eq!(state.current_step(), 1);
        assert!(!state.is_completed(1));
        assert_eq!(
            actions,
            vec![WizardAction::InvalidateMemberDetail {
                member_id: MemberId::from("LM-5")
            }]
        );
    }

    #[test]
    fn test_update_mode_address_save_advances() {
        let mut state = update_state("LM-5");
        state.set_current_step(3).unwrap();
        let (state, actions) = WizardStateMachine::transition(
            state,
            WizardEvent::StepSaved {
                step: WizardStep::Address,
            },
        )
        .unwrap();
        assert_eq!(state.current_step(), 4);
        assert!(state.is_completed(3));
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_error() {
        let result =
            WizardStateMachine::transition(WizardState::new(), WizardEvent::JumpTo { index: 12 });
        assert!(matches!(result, Err(WizardError::StepOutOfRange { .. })));
    }

    #[test]
    fn test_member_id_assigned_in_create_mode() {
        let (state, _) = WizardStateMachine::transition(
            WizardState::new(),
            WizardEvent::MemberIdAssigned {
                member_id: MemberId::from("LM-100"),
            },
        )
        .unwrap();
        assert_eq!(state.member_id(), Some(&MemberId::from("LM-100")));
        assert!(!state.is_update_mode());
    }
}
