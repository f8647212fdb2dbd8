use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxIdentityRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificateRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}
