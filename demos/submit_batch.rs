use oxisquare::functions::employees;
use oxisquare::{batch, Environment, SquareContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut employee_ids: Vec<String> = vec![];
    let mut access_token = None;
    let mut flag = false;
    for arg in std::env::args().skip(1) {
        if flag {
            access_token = Some(arg);
            flag = false;
            continue;
        }
        if arg.trim() == "--access_token" {
            flag = true;
            continue;
        }
        employee_ids.push(arg);
    }

    let mut ctx = SquareContext::new_from_env(Environment::Production)?;
    if let Some(token) = access_token {
        ctx = ctx.with_access_token(token);
    }

    let requests: Vec<_> = employee_ids
        .iter()
        .map(|id| employees::retrieve_employee_batch(ctx.access_token(), id))
        .collect();

    let client = ureq::Agent::new_with_defaults();
    let responses = batch::submit_batch(&ctx, &client, &requests)?;
    for response in responses {
        match response.decode_body::<oxisquare::types::Employee>() {
            Ok(employee) => println!(
                "{}: {} {}",
                response.request_id, employee.first_name, employee.last_name
            ),
            Err(err) => println!(
                "{}: status {} ({err})",
                response.request_id, response.status_code
            ),
        }
    }
    Ok(())
}
