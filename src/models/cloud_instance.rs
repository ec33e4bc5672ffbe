use rusoto_ec2::Reservation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudInstance {
    pub id: String,
    pub state: String,
}

/// What the provider handed back for one `RunInstances` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResponse {
    pub reservation_id: Option<String>,
    pub instances: Vec<CloudInstance>,
}

impl From<Reservation> for ProviderResponse {
    fn from(reservation: Reservation) -> Self {
        let instances = reservation
            .instances
            .unwrap_or_default()
            .into_iter()
            .map(|instance| CloudInstance {
                id: instance.instance_id.unwrap_or_default(),
                state: instance
                    .state
                    .and_then(|state| state.name)
                    .unwrap_or_else(|| "unknown".to_string()),
            })
            .collect();

        ProviderResponse {
            reservation_id: reservation.reservation_id,
            instances,
        }
    }
}
