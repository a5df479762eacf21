use ferrous_lookup_domain::LookupOutcome;

/// Text printed on stdout for an outcome.
/// The first answer line shows the name as decoded from the reply.
pub fn render(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Answered(result) => {
            let response = &result.response;
            format!(
                "DnsClient sending request for: {}\n\
                 Server: {}\n\
                 Request type: {}\n\
                 Response received after {:.6} seconds ({} retries)",
                response.queried_name,
                response.answer_data,
                response.request_type_label.unwrap_or("Unknown response"),
                result.elapsed.as_secs_f64(),
                result.retries,
            )
        }
        LookupOutcome::Rejected { message, .. } => message.to_string(),
        LookupOutcome::NoResponse { attempts } => {
            format!("ERROR: No response received after {} attempts", attempts)
        }
        LookupOutcome::Failed(e) => format!("ERROR: {}", e),
    }
}

pub fn exit_code(outcome: &LookupOutcome) -> i32 {
    if outcome.server_answered() {
        0
    } else {
        1
    }
}
