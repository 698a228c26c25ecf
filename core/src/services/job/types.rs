//! Input commands for the job service

/// Job creation input
#[derive(Debug, Clone, Default)]
pub struct CreateJobCommand {
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub job_location: Option<String>,
}

/// Job update input; company, position and job location are required
#[derive(Debug, Clone, Default)]
pub struct UpdateJobCommand {
    pub company: Option<String>,
    pub position: Option<String>,
    pub job_location: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
}

/// Raw listing parameters as received from the client
#[derive(Debug, Clone, Default)]
pub struct JobSearchParams {
    /// Status name or `all`
    pub status: Option<String>,
    /// Job type name or `all`
    pub job_type: Option<String>,
    /// `latest`, `oldest`, `a-z` or `z-a`
    pub sort: Option<String>,
    /// Substring of the position
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
