use oxisquare::functions::payments::{list_payments, ListPaymentsParams};
use oxisquare::{Environment, SquareContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let location_id = args.next().expect("usage: list_payments <location_id>");

    let client = ureq::Agent::new_with_defaults();
    let ctx = SquareContext::new_from_env(Environment::Production)?;

    let params = ListPaymentsParams {
        limit: Some(50),
        ..ListPaymentsParams::default()
    };
    let (mut payments, mut next) = list_payments(&ctx, &client, &location_id, &params)?;
    while let Some(cursor) = next {
        let (page, after): (Vec<oxisquare::types::Payment>, _) = cursor.fetch(&client)?;
        payments.extend(page);
        next = after;
    }

    for payment in &payments {
        println!(
            "{} {} {}",
            payment.id,
            payment.total_collected_money.amount,
            payment.total_collected_money.currency_code
        );
    }
    println!("{} payments", payments.len());
    Ok(())
}
