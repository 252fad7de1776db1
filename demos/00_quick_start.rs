/// quick start - minimal example to get started
use lending_book_rs::{
    LendingService, LoanCategory, LoanType, LoanView, MemoryRepository, Money, NewClient,
    NewLoan, OwnershipType, Rate, RepaymentConditions, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut service = LendingService::new(MemoryRepository::new());

    // register a client
    let client = service.create_client(
        NewClient {
            name: "Meridian Tooling LLC".to_string(),
            ownership: OwnershipType::LimitedLiability,
            address: "14 Foundry Lane".to_string(),
            phone: "+380441234567".to_string(),
            contact_person: "O. Demchenko".to_string(),
        },
        &time,
    )?;

    // open a 10-installment loan
    let loans = service.add_loan(
        client.id,
        NewLoan {
            loan_type: LoanType {
                conditions: RepaymentConditions::MonthlyInstallment,
                interest_rate: Rate::from_percentage(12),
                term: 10,
                category: LoanCategory::SmallBusiness,
            },
            amount: Money::from_major(10_000),
            total_loan: None,
            issue_date: time.now(),
            due_date: None,
        },
        &time,
    )?;
    let loan_id = loans[0].id;

    // pay the first installment
    service.record_payment(client.id, loan_id, Money::from_major(1_000), &time)?;

    // print current state
    let loan = service.get_loan(client.id, loan_id)?;
    println!("{}", LoanView::from_loan(&loan).to_json()?);

    Ok(())
}
