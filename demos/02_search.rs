/// search - filtered client listings
use lending_book_rs::{
    LendingService, LoanCategory, LoanType, MemoryRepository, Money, NewClient, NewLoan,
    OwnershipType, Rate, RepaymentConditions, SafeTimeProvider, SearchFilters, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut service = LendingService::new(MemoryRepository::new());

    let book = [
        ("Aurora Textiles", OwnershipType::LimitedLiability, LoanCategory::SmallBusiness, 12, 10u32),
        ("Dnipro Freight", OwnershipType::JointStock, LoanCategory::Equipment, 9, 24),
        ("Zenith Mills", OwnershipType::StateOwned, LoanCategory::StateProgram, 5, 36),
    ];

    for (name, ownership, category, rate, term) in book {
        let client = service.create_client(
            NewClient {
                name: name.to_string(),
                ownership,
                address: "1 Main St".to_string(),
                phone: "+380440000000".to_string(),
                contact_person: "A. Contact".to_string(),
            },
            &time,
        )?;
        service.add_loan(
            client.id,
            NewLoan {
                loan_type: LoanType {
                    conditions: RepaymentConditions::MonthlyInstallment,
                    interest_rate: Rate::from_percentage(rate),
                    term,
                    category,
                },
                amount: Money::from_major(5_000),
                total_loan: None,
                issue_date: time.now(),
                due_date: None,
            },
            &time,
        )?;
    }

    let filters = SearchFilters {
        ownership: Some("limited-liability,joint-stock".to_string()),
        ..Default::default()
    };
    println!("private ownership:");
    for client in service.search_clients(&filters)? {
        println!("  {}", client.name);
    }

    let filters = SearchFilters {
        category: Some("equipment".to_string()),
        term: Some("24".to_string()),
        ..Default::default()
    };
    println!("equipment loans over 24 periods:");
    for client in service.search_clients(&filters)? {
        println!("  {}", client.name);
    }

    let filters = SearchFilters {
        client_name: Some("mills".to_string()),
        ..Default::default()
    };
    println!("name contains 'mills':");
    for client in service.search_clients(&filters)? {
        println!("  {}", client.name);
    }

    Ok(())
}
