/// penalty lifecycle - deterministic walkthrough with controlled time
use chrono::{Duration, TimeZone, Utc};
use lending_book_rs::{
    Event, LendingService, LoanCategory, LoanType, MemoryRepository, Money, NewClient, NewLoan,
    OwnershipType, Rate, RepaymentConditions, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== penalty lifecycle example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();
    let mut service = LendingService::new(MemoryRepository::new());

    let client = service.create_client(
        NewClient {
            name: "Dnipro Freight".to_string(),
            ownership: OwnershipType::JointStock,
            address: "8 Harbor Street".to_string(),
            phone: "+380567700123".to_string(),
            contact_person: "I. Savchuk".to_string(),
        },
        &time,
    )?;

    let loans = service.add_loan(
        client.id,
        NewLoan {
            loan_type: LoanType {
                conditions: RepaymentConditions::MonthlyInstallment,
                interest_rate: Rate::from_percentage(10),
                term: 10,
                category: LoanCategory::Equipment,
            },
            amount: Money::from_major(1_000),
            total_loan: None,
            issue_date: time.now(),
            due_date: None,
        },
        &time,
    )?;
    let loan_id = loans[0].id;
    println!("loan issued on {}", time.now().format("%Y-%m-%d"));

    // 45 days pass before the first installment arrives, and it is short
    controller.advance(Duration::days(45));
    println!("\npaying 50 on {} (45 days late, 50 short)", time.now().format("%Y-%m-%d"));
    service.record_payment(client.id, loan_id, Money::from_major(50), &time)?;

    let loan = service.get_loan(client.id, loan_id)?;
    for penalty in &loan.penalties {
        println!("  penalty: {} ({})", penalty.amount, penalty.reason);
    }
    println!("payable is now {}", loan.payable);

    // clear the balance in one go
    controller.advance(Duration::days(10));
    println!("\nsettling the remaining {} on {}", loan.payable, time.now().format("%Y-%m-%d"));
    service.record_payment(client.id, loan_id, loan.payable, &time)?;

    let loan = service.get_loan(client.id, loan_id)?;
    println!("final status: {:?}", loan.status);

    println!("\naudit trail:");
    for event in service.take_events() {
        match event {
            Event::PenaltyAssessed { amount, reason, .. } => {
                println!("  penalty assessed: {amount} ({reason:?})")
            }
            Event::PaymentReceived { amount, new_payable, .. } => {
                println!("  payment received: {amount}, payable {new_payable}")
            }
            Event::LoanSettled { .. } => println!("  loan settled"),
            other => println!("  {other:?}"),
        }
    }

    Ok(())
}
