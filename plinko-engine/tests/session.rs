use plinko_engine::types::BallDrop;
use plinko_engine::{
    landing_channel, BallSimulator, BetError, GameBackend, GameSession, Landing, LandingSender,
    PayoutTable, RiskLevel,
};
use std::sync::{Arc, Mutex};

struct StubBackend {
    point: f64,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, RiskLevel)>>>,
}

impl GameBackend for StubBackend {
    async fn request_drop(&self, bet_amount: &str, risk: RiskLevel) -> Result<f64, BetError> {
        self.calls
            .lock()
            .unwrap()
            .push((bet_amount.to_string(), risk));
        if self.fail {
            return Err(BetError::Server {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(self.point)
    }
}

struct RecordingSimulator {
    drops: Arc<Mutex<Vec<BallDrop>>>,
}

impl BallSimulator for RecordingSimulator {
    fn add_ball(&self, drop: BallDrop) {
        self.drops.lock().unwrap().push(drop);
    }
}

type Calls = Arc<Mutex<Vec<(String, RiskLevel)>>>;
type Drops = Arc<Mutex<Vec<BallDrop>>>;

fn session_with(
    point: f64,
    fail: bool,
) -> (
    GameSession<StubBackend, RecordingSimulator>,
    LandingSender,
    Drops,
    Calls,
) {
    let (tx, rx) = landing_channel();
    let drops: Drops = Arc::new(Mutex::new(Vec::new()));
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let backend = StubBackend {
        point,
        fail,
        calls: calls.clone(),
    };
    let simulator = RecordingSimulator {
        drops: drops.clone(),
    };
    let session = GameSession::new(backend, simulator, rx, PayoutTable::standard());
    (session, tx, drops, calls)
}

#[tokio::test]
async fn place_bet__schedules_one_drop_with_committed_amount() {
    let (mut session, _tx, drops, calls) = session_with(371.0, false);
    // given
    session.editor_mut().set_draft_text("10.0000");
    session.editor_mut().commit();

    // when
    let ticket = session.place_bet().await.unwrap();

    // then
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[("10.0000".to_string(), RiskLevel::Medium)]
    );
    let drops = drops.lock().unwrap();
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].ticket, ticket);
    assert_eq!(drops[0].point, 371.0);
    assert_eq!(session.pending_drops(), 1);
}

#[tokio::test]
async fn place_bet__sends_selected_risk_level() {
    let (mut session, _tx, _drops, calls) = session_with(400.0, false);
    session.editor_mut().set_draft_text("1.0000");
    session.editor_mut().commit();
    session.set_risk(RiskLevel::High);

    session.place_bet().await.unwrap();

    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[("1.0000".to_string(), RiskLevel::High)]
    );
}

#[tokio::test]
async fn place_bet__rejects_malformed_committed_amount() {
    let (mut session, _tx, drops, calls) = session_with(371.0, false);
    // given: commit is verbatim, so free text reaches the committed slot
    session.editor_mut().set_draft_text("not a number");
    session.editor_mut().commit();
    assert_eq!(session.editor().committed(), "not a number");

    // when
    let err = session.place_bet().await.unwrap_err();

    // then: nothing was sent and no drop was scheduled
    assert!(matches!(err, BetError::InvalidAmount(_)));
    assert!(calls.lock().unwrap().is_empty());
    assert!(drops.lock().unwrap().is_empty());
    assert_eq!(session.pending_drops(), 0);
}

#[tokio::test]
async fn place_bet__rejects_negative_committed_amount() {
    let (mut session, _tx, drops, _calls) = session_with(371.0, false);
    session.editor_mut().set_draft_text("-5.0000");
    session.editor_mut().commit();

    let err = session.place_bet().await.unwrap_err();

    assert!(matches!(err, BetError::InvalidAmount(_)));
    assert!(drops.lock().unwrap().is_empty());
}

#[tokio::test]
async fn place_bet__server_failure_never_reaches_simulator() {
    let (mut session, _tx, drops, calls) = session_with(371.0, true);
    session.editor_mut().set_draft_text("10.0000");
    session.editor_mut().commit();

    let err = session.place_bet().await.unwrap_err();

    assert!(matches!(err, BetError::Server { status: 500, .. }));
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(drops.lock().unwrap().is_empty());
    assert_eq!(session.pending_drops(), 0);
    // the committed amount is untouched by the failure
    assert_eq!(session.editor().committed(), "10.0000");
}

#[tokio::test]
async fn place_bet__overlapping_submissions_are_not_serialized() {
    let (mut session, _tx, drops, _calls) = session_with(400.0, false);
    session.editor_mut().set_draft_text("2.0000");
    session.editor_mut().commit();

    let (first, second) = tokio::join!(session.place_bet(), session.place_bet());

    let first = first.unwrap();
    let second = second.unwrap();
    assert_ne!(first, second);
    assert_eq!(drops.lock().unwrap().len(), 2);
    assert_eq!(session.pending_drops(), 2);
}

#[tokio::test]
async fn landing__pays_out_against_stake_at_submission() {
    let (mut session, tx, _drops, _calls) = session_with(400.0, false);
    // given: a bet at 5.0000, then a recommit to 50.0000 and a second bet
    session.editor_mut().set_draft_text("5.0000");
    session.editor_mut().commit();
    let first = session.place_bet().await.unwrap();

    session.editor_mut().set_draft_text("50.0000");
    session.editor_mut().commit();
    let second = session.place_bet().await.unwrap();

    // when: the first drop lands after the recommit
    tx.send(Landing {
        ticket: first,
        bucket: 1,
    })
    .unwrap();
    let result = session.next_result().await.unwrap();

    // then: it pays against its own captured stake, not the new commit
    assert_eq!(result.ticket, first);
    assert_eq!(result.multiplier, 2.0);
    assert_eq!(result.stake, 5.0);
    assert_eq!(result.payout, 10.0);

    tx.send(Landing {
        ticket: second,
        bucket: 1,
    })
    .unwrap();
    let result = session.next_result().await.unwrap();
    assert_eq!(result.stake, 50.0);
    assert_eq!(result.payout, 100.0);
    assert_eq!(session.pending_drops(), 0);
}

#[tokio::test]
async fn landing__latest_settlement_overwrites_the_result_slot() {
    let (mut session, tx, _drops, _calls) = session_with(400.0, false);
    session.editor_mut().set_draft_text("10.0000");
    session.editor_mut().commit();
    let first = session.place_bet().await.unwrap();
    let second = session.place_bet().await.unwrap();

    tx.send(Landing {
        ticket: first,
        bucket: 1,
    })
    .unwrap();
    session.next_result().await.unwrap();
    assert_eq!(session.last_result().unwrap().payout, 20.0);

    // bucket 5 wraps to index 2 of the 3-entry table
    tx.send(Landing {
        ticket: second,
        bucket: 5,
    })
    .unwrap();
    session.next_result().await.unwrap();

    let last = session.last_result().unwrap();
    assert_eq!(last.ticket, second);
    assert_eq!(last.multiplier, 2.5);
    assert_eq!(last.payout, 25.0);
}

#[tokio::test]
async fn landing__unknown_ticket_is_skipped() {
    let (mut session, tx, _drops, _calls) = session_with(400.0, false);
    session.editor_mut().set_draft_text("10.0000");
    session.editor_mut().commit();
    let ticket = session.place_bet().await.unwrap();

    tx.send(Landing { ticket, bucket: 0 }).unwrap();
    // a duplicate landing for an already-settled ticket
    tx.send(Landing { ticket, bucket: 2 }).unwrap();
    drop(tx);

    let result = session.next_result().await.unwrap();
    assert_eq!(result.multiplier, 1.5);

    // the duplicate is skipped and the channel drains to None
    assert!(session.next_result().await.is_none());
    assert_eq!(session.last_result().unwrap().ticket, result.ticket);
}
