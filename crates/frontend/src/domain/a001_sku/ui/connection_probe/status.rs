use contracts::domain::a001_sku::SkuProbeRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Unchecked,
    Healthy,
    Failed,
}

/// Результат проверки подключения; выставляется один раз при монтировании
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub state: ProbeState,
    pub message: String,
}

impl ConnectionStatus {
    pub fn unchecked() -> Self {
        Self {
            state: ProbeState::Unchecked,
            message: String::new(),
        }
    }

    pub fn from_probe(result: Result<Vec<SkuProbeRow>, String>) -> Self {
        match result {
            Ok(rows) => {
                let message = match rows.first() {
                    Some(row) => format!("Connected. Sample SKU: {}", row.name),
                    None => "Connected, but no SKUs found".to_string(),
                };
                Self {
                    state: ProbeState::Healthy,
                    message,
                }
            }
            Err(e) => {
                let message = if e.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    e
                };
                Self {
                    state: ProbeState::Failed,
                    message,
                }
            }
        }
    }

    pub fn display_text(&self) -> String {
        match self.state {
            ProbeState::Unchecked => "Checking Supabase connection…".to_string(),
            ProbeState::Failed => format!("❌ Supabase error: {}", self.message),
            ProbeState::Healthy => format!("✅ Supabase OK — {}", self.message),
        }
    }
}
