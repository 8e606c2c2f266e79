//! Conversion between ipdns domain types and hickory wire types.

use hickory_proto::op::{Query as HickoryQuery, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::rdata::{A, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::ProtoError;
use ipdns_domain::{
    Question, RecordClass, RecordData, RecordType, ResourceRecord, ResponseCode, SoaData,
};

/// Bidirectional mapper between domain and hickory message parts
pub struct RecordMapper;

impl RecordMapper {
    /// Decoded wire question → domain question (name kept as received)
    pub fn to_question(query: &HickoryQuery) -> Question {
        Question::new(
            query.name().to_ascii(),
            RecordClass::from_u16(u16::from(query.query_class())),
            RecordType::from_u16(u16::from(query.query_type())),
        )
    }

    /// Domain record → hickory record ready for the answer section.
    ///
    /// Names are parsed as plain ASCII so their case reaches the wire unchanged.
    pub fn to_record(record: &ResourceRecord) -> Result<Record, ProtoError> {
        let name = Name::from_ascii(&record.name)?;
        let rdata = match &record.data {
            RecordData::A(address) => RData::A(A(*address)),
            RecordData::NS(nameserver) => RData::NS(NS(Name::from_ascii(nameserver)?)),
            RecordData::SOA(soa) => RData::SOA(Self::to_soa(soa)?),
        };
        Ok(Record::from_rdata(name, record.ttl, rdata))
    }

    pub fn to_records(records: &[ResourceRecord]) -> Result<Vec<Record>, ProtoError> {
        records.iter().map(Self::to_record).collect()
    }

    pub fn to_response_code(code: ResponseCode) -> HickoryResponseCode {
        match code {
            ResponseCode::NoError => HickoryResponseCode::NoError,
            ResponseCode::NXDomain => HickoryResponseCode::NXDomain,
            ResponseCode::NotImp => HickoryResponseCode::NotImp,
            ResponseCode::Refused => HickoryResponseCode::Refused,
        }
    }

    // SOA timers are signed on the wire; config validation keeps them in range.
    fn to_soa(soa: &SoaData) -> Result<SOA, ProtoError> {
        let timer = |field: &str, value: u32| {
            i32::try_from(value)
                .map_err(|_| ProtoError::from(format!("SOA {} out of range: {}", field, value)))
        };

        Ok(SOA::new(
            Name::from_ascii(&soa.authority)?,
            Name::from_ascii(&soa.mbox)?,
            soa.serial,
            timer("refresh", soa.refresh)?,
            timer("retry", soa.retry)?,
            timer("expire", soa.expire)?,
            soa.minttl,
        ))
    }
}
